pub mod impls;
pub mod store;

pub use store::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, RedisPreferenceStore, StoreError,
};
