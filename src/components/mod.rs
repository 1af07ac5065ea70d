mod carousel;
mod event_card;
mod home;
mod navigation;
mod new_event;

pub use carousel::FeaturedCarousel;
pub use event_card::EventCard;
pub use home::HomeScreen;
pub use navigation::NavigationBar;
pub use new_event::NewEventScreen;
