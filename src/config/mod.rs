// Library-level settings shared with the CLI configuration file

pub mod load;

pub use load::LoadSettings;
