use crate::notestore::BoxedNoteStore;
use crate::NoteStore;

pub async fn populate_demo_data(store: &BoxedNoteStore) {
    store
        .new_note(
            "Welcome to Jotpad".to_owned(),
            "Create, organize, and search your personal notes.".to_owned(),
            vec!["intro".to_owned()],
        )
        .await
        .unwrap();
    store
        .new_note(
            "Groceries".to_owned(),
            "Milk, eggs, bread, coffee.".to_owned(),
            vec!["errands".to_owned(), "shopping".to_owned()],
        )
        .await
        .unwrap();
    store
        .new_note(
            "Reading list".to_owned(),
            "The Rust book, chapter 10 onwards.".to_owned(),
            vec!["reading".to_owned()],
        )
        .await
        .unwrap();
}
