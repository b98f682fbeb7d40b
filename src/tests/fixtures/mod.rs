pub mod apartments;

pub mod commands {
    pub mod add_apartment;
    pub mod book_apartment;
}
