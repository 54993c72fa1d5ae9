pub mod profile;

pub use profile::{Education, Job, Personal, Profile, SkillCategory, Skills};
