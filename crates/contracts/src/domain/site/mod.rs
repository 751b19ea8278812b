pub mod aggregate;

pub use aggregate::{
    ClientEntry, ClientsData, LegalData, LegalDoc, LegalSection, NavLink, SiteConfig, SocialLink,
};
