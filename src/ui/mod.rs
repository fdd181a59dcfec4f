// Desktop front-end: egui renderer and input adapter

pub mod app;
pub mod canvas;
