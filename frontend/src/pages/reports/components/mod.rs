pub mod builder;
pub mod recent;
pub mod template_card;
