pub mod laptop_service;
