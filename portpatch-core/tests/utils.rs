use std::{fs, path::Path};

#[macro_export]
macro_rules! create_test_files {
    ($($name:expr => $content:expr),+ $(,)?) => {
        {
            use std::fs::{create_dir_all, write};
            use tempfile::TempDir;

            let temp_dir = TempDir::new().unwrap();
            $(
                let path = temp_dir.path().join($name);
                create_dir_all(path.parent().unwrap()).unwrap();
                let content: &[u8] = $content;
                write(&path, content).unwrap();
            )+
            temp_dir
        }
    };
}

#[macro_export]
macro_rules! text {
    ($($line:expr),+ $(,)?) => {
        concat!($($line, "\n"),+).as_bytes()
    };
}

pub fn collect_files(dir: &Path, base: &Path, files: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            let rel_path = path
                .strip_prefix(base)
                .unwrap()
                .to_str()
                .unwrap()
                .replace('\\', "/");
            files.push(rel_path);
        } else if path.is_dir() {
            collect_files(&path, base, files);
        }
    }
}

#[macro_export]
macro_rules! assert_test_files {
    ($temp_dir:expr, $($name:expr => $content:expr),+ $(,)?) => {
        {
            use std::fs;

            $(
                let expected_contents: &[u8] = $content;
                let path = $temp_dir.path().join($name);

                assert!(path.exists(), "File {} does not exist", $name);

                let actual_contents = fs::read(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {}: {}", $name, e));
                assert_eq!(
                    String::from_utf8_lossy(&actual_contents),
                    String::from_utf8_lossy(expected_contents),
                    "Contents mismatch for file {}",
                    $name,
                );
            )+

            let mut expected_files: Vec<String> = vec![$($name.to_string()),+];
            expected_files.sort();

            let mut actual_files = Vec::new();
            utils::collect_files($temp_dir.path(), $temp_dir.path(), &mut actual_files);
            actual_files.sort();

            assert_eq!(
                actual_files,
                expected_files,
                "Directory contains unexpected files.\nExpected files: {:?}\nActual files: {:?}",
                expected_files,
                actual_files
            );
        }
    };
}
