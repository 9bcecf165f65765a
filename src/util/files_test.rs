use std::{env, io::Write};

use super::*;

#[test]
fn test_create_open_file() {
    let dir = env::temp_dir().join("rbt-oracle-files-test");
    let file = dir.join("nested").join("oracle.txt");
    fs::remove_dir_all(&dir).ok();

    {
        let mut fd = create_file_w(file.as_os_str()).unwrap();
        fd.write_all(b"CMP ()\nINS 5\n").unwrap();
    }
    // re-creating truncates.
    {
        let mut fd = create_file_w(file.as_os_str()).unwrap();
        fd.write_all(b"CMP ()\n").unwrap();
    }
    open_file_r(file.as_os_str()).unwrap();
    assert_eq!(fs::read(&file).unwrap(), b"CMP ()\n".to_vec());

    let missing = dir.join("missing.txt");
    assert!(matches!(
        open_file_r(missing.as_os_str()),
        Err(Error::IOError(_, _))
    ));
}
