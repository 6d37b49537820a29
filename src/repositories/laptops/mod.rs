pub mod laptop_repo;
