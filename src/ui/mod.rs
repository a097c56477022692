// src/ui/mod.rs
pub mod analyzer;
pub mod overview;
pub mod results;
pub mod threat_card;
pub mod notifications;
pub mod widgets;
