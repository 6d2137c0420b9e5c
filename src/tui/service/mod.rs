pub mod cleaner;
pub mod disk;
pub mod explorer;
pub mod scanner;
