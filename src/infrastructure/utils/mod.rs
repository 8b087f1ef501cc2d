pub mod linkify;
