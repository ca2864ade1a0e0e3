pub mod room_card;
