pub mod bambora;

pub use self::bambora::Bambora;
