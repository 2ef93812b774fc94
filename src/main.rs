#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    sweet_delights_lib::run()
}
