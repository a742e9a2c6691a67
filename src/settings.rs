use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Settings {
    pub storage_dir: PathBuf,
    pub placeholder: char,
    pub no_clue_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            storage_dir: PathBuf::from("."),
            placeholder: '_',
            no_clue_text: "No Clue for Difficult Level".to_owned(),
        }
    }
}
