pub mod community;

pub use community::CommunityFormInput;
