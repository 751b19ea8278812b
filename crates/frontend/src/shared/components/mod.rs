pub mod cta;
pub mod cursor;
pub mod hero_scene;
pub mod loading_screen;
pub mod marquee;
pub mod nav_link;
pub mod reveal;
