mod note;

pub use note::{Note, SHORT_ID_LEN};
