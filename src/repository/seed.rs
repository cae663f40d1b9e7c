//! Sample catalog loaded at startup

use crate::models::{Author, Book};

pub fn authors() -> Vec<Author> {
    vec![
        Author {
            id: 1,
            name: "J.K. Rowling".to_string(),
            email: "jk.rowling@example.com".to_string(),
            bio: "British author, best known for the Harry Potter series.".to_string(),
        },
        Author {
            id: 2,
            name: "Stephen King".to_string(),
            email: "stephen.king@example.com".to_string(),
            bio: "American author of horror, suspense and fantasy novels.".to_string(),
        },
        Author {
            id: 3,
            name: "Agatha Christie".to_string(),
            email: "agatha.christie@example.com".to_string(),
            bio: "English writer known for her detective novels.".to_string(),
        },
    ]
}

pub fn books() -> Vec<Book> {
    let book = |id, title: &str, isbn: &str, published_year, author_id| Book {
        id,
        title: title.to_string(),
        isbn: isbn.to_string(),
        published_year,
        author_id,
    };
    vec![
        book(1, "Harry Potter and the Philosopher's Stone", "978-0-7475-3269-9", 1997, 1),
        book(2, "Harry Potter and the Chamber of Secrets", "978-0-7475-3849-3", 1998, 1),
        book(3, "The Shining", "978-0-385-12167-5", 1977, 2),
        book(4, "It", "978-0-670-81302-5", 1986, 2),
        book(5, "Murder on the Orient Express", "978-0-00-711931-8", 1934, 3),
    ]
}
