mod common;
mod domain;
mod draft;
