// UI Module
// Console menu around the rsa core

pub mod menu;
