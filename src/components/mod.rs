//! Page sections for the Meraki studio site.
//!
//! Each section owns its own reveal latch or scroll value; none share state.

mod about;
mod contact;
mod design_process;
mod featured_projects;
mod floating_contact;
mod footer;
mod hero;
mod navbar;
mod reveal;
mod services;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use design_process::DesignProcess;
pub use featured_projects::FeaturedProjects;
pub use floating_contact::FloatingContact;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use services::Services;
pub use testimonials::Testimonials;
