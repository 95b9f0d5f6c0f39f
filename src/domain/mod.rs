// Domain layer - Plain data types shared by every other layer
pub mod fetch_state;
pub mod map;
pub mod street;
