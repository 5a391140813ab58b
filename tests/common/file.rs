use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Write a file of `words_count` generated words and return its content
pub fn write_generated_words(path: &Path, words_count: usize) -> String {
    use fake::{Fake, faker::lorem::en::Words};

    let content = Words(words_count..words_count + 1)
        .fake::<Vec<String>>()
        .join(" ");
    write_file(FileSpec::new(path.to_path_buf(), content.clone().into()));

    content
}

pub fn read_file(path: &Path) -> Vec<u8> {
    std::fs::read(path).unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}
