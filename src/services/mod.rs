// NekoBrowser services
// Services provide external functionality: the remote random-image source.

pub mod image_service;
