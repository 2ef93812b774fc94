// Testimonial data models
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub rating: u8,
    pub date: DateTime<Utc>,
}

/// Form payload for a new or edited testimonial
#[derive(Debug, Clone, Deserialize)]
pub struct TestimonialDraft {
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    pub rating: u8,
}

impl Testimonial {
    pub fn new(id: String, draft: TestimonialDraft) -> Self {
        Self {
            id,
            name: draft.name,
            position: draft.position,
            content: draft.content,
            image: draft.image,
            // Star widget range; out-of-range form values are pulled back in
            rating: draft.rating.clamp(1, 5),
            date: Utc::now(),
        }
    }

    /// Built-in testimonials used when the file is missing or corrupt
    pub fn seed_testimonials() -> Vec<Testimonial> {
        vec![
            Testimonial {
                id: "1".to_string(),
                name: "Emma Thompson".to_string(),
                position: Some("Food Blogger".to_string()),
                content: "The croissants from Sweet Delights are the best I've had outside of Paris. Perfectly flaky and buttery!".to_string(),
                image: Some("https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
                rating: 5,
                date: seed_date(2023, 2, 15),
            },
            Testimonial {
                id: "2".to_string(),
                name: "David Chen".to_string(),
                position: Some("Local Restaurant Owner".to_string()),
                content: "As a restaurant owner, I appreciate quality baked goods. Sweet Delights consistently delivers exceptional bread for our establishment.".to_string(),
                image: Some("https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
                rating: 5,
                date: seed_date(2023, 3, 10),
            },
            Testimonial {
                id: "3".to_string(),
                name: "Sarah Johnson".to_string(),
                position: Some("Regular Customer".to_string()),
                content: "I've been ordering their sourdough bread weekly for months. The flavor is incredible and it stays fresh for days!".to_string(),
                image: Some("https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
                rating: 4,
                date: seed_date(2023, 1, 20),
            },
            Testimonial {
                id: "4".to_string(),
                name: "Michael Rodriguez".to_string(),
                position: Some("Birthday Party Host".to_string()),
                content: "The custom cake I ordered for my daughter's birthday was not only beautiful but absolutely delicious. Everyone wanted to know where I got it!".to_string(),
                image: Some("https://images.pexels.com/photos/91227/pexels-photo-91227.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
                rating: 5,
                date: seed_date(2023, 4, 5),
            },
        ]
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rating: u8) -> TestimonialDraft {
        TestimonialDraft {
            name: "Ana".to_string(),
            position: None,
            content: "Great bread".to_string(),
            image: None,
            rating,
        }
    }

    #[test]
    fn test_rating_clamped_to_range() {
        assert_eq!(Testimonial::new("1".to_string(), draft(0)).rating, 1);
        assert_eq!(Testimonial::new("2".to_string(), draft(3)).rating, 3);
        assert_eq!(Testimonial::new("3".to_string(), draft(9)).rating, 5);
    }

    #[test]
    fn test_seed_testimonials_ids_unique() {
        let seeds = Testimonial::seed_testimonials();
        assert_eq!(seeds.len(), 4);
        for testimonial in &seeds {
            assert_eq!(seeds.iter().filter(|t| t.id == testimonial.id).count(), 1);
        }
    }
}
