pub mod hashmap_user_store;
pub mod mongo_user_store;
