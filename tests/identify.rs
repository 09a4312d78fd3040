use std::{fs, io::Write, path::Path, sync::Arc};

use license_vectorizer::{open_project, Algorithm, Database, Error, Identifier, Vectorizer};
use zip::{write::SimpleFileOptions, ZipWriter};

const APACHE: &str = "Licensed under the Apache License, Version 2.0 (the \"License\");\n\
    you may not use this file except in compliance with the License.\n\
    You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0\n\
    Unless required by applicable law or agreed to in writing, software distributed under the \
    License is distributed on an \"AS IS\" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND.";

const MIT: &str = "Permission is hereby granted, free of charge, to any person obtaining a copy\n\
    of this software and associated documentation files (the \"Software\"), to deal\n\
    in the Software without restriction, including without limitation the rights\n\
    to use, copy, modify, merge, publish, distribute, sublicense, and/or sell\n\
    copies of the Software.";

const WTFPL: &str = "DO WHAT THE FUCK YOU WANT TO PUBLIC LICENSE\n\
    Everyone is permitted to copy and distribute verbatim or modified\n\
    copies of this license document, and changing it is allowed as long\n\
    as the name is changed.\n\
    0. You just DO WHAT THE FUCK YOU WANT TO.";

fn reference_db(path: &Path) {
    let mut db = Database::new();
    for name in ["5gram", "wordfreq", "tfidf"] {
        let algorithm: Algorithm = name.parse().unwrap();
        for (license, text) in [("Apache-2.0", APACHE), ("MIT", MIT), ("WTFPL", WTFPL)] {
            db.put(&algorithm.name(), algorithm.parse_str(text, license));
        }
    }
    db.save(path).unwrap();
}

fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let mut writer = ZipWriter::new(fs::File::create(path).unwrap());
    for (name, body) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn identifies_directory_and_archive_projects() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("liossdb.json.gz");
    reference_db(&store);
    let db = Arc::new(Database::load(&store).unwrap());

    let project_dir = dir.path().join("project");
    fs::create_dir_all(project_dir.join("third_party")).unwrap();
    fs::write(project_dir.join("LICENSE"), MIT.replace('\n', "\r\n")).unwrap();
    fs::write(project_dir.join("third_party/LICENSE.txt"), APACHE).unwrap();
    fs::write(project_dir.join("README"), WTFPL).unwrap();

    let archive = dir.path().join("app.jar");
    write_zip(&archive, &[("META-INF/LICENSE", WTFPL), ("Main.class", "cafebabe")]);

    for algorithm in ["5gram", "wordfreq", "tfidf"] {
        let identifier = Identifier::new(algorithm.parse().unwrap(), 0.75, db.clone()).unwrap();

        let mut project = open_project(&project_dir).unwrap();
        let results = identifier.identify_project(project.as_mut());
        let ids: Vec<&str> = results.keys().map(|k| k.as_str()).collect();
        assert_eq!(ids, ["LICENSE", "third_party/LICENSE.txt"]);
        assert_eq!(results["LICENSE"].as_ref().unwrap()[0].name, "MIT", "{algorithm}");
        assert_eq!(
            results["third_party/LICENSE.txt"].as_ref().unwrap()[0].name,
            "Apache-2.0",
            "{algorithm}"
        );

        let mut project = open_project(&archive).unwrap();
        let results = identifier.identify_project(project.as_mut());
        let matches = results["META-INF/LICENSE"].as_ref().unwrap();
        assert_eq!(matches.len(), 1, "{algorithm}: {matches:?}");
        assert_eq!(matches[0].name, "WTFPL");
    }
}

#[test]
fn every_store_format_identifies_alike() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("db.json");
    reference_db(&json);
    let db = Database::load(&json).unwrap();
    let cbor = dir.path().join("db.cbor.gz");
    db.save(&cbor).unwrap();
    assert_eq!(Database::load(&cbor).unwrap(), db);
}

#[test]
fn project_without_license_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    let store = dir.path().join("db.json");
    reference_db(&store);
    let db = Arc::new(Database::load(&store).unwrap());
    let identifier = Identifier::new("wordfreq".parse().unwrap(), 0.75, db).unwrap();
    let mut project = open_project(dir.path()).unwrap();
    assert!(identifier.identify_project(project.as_mut()).is_empty());
}

#[test]
fn configuration_errors_come_first() {
    let err = Identifier::new("5gram".parse().unwrap(), 2.0, Arc::new(Database::new())).unwrap_err();
    assert!(err.is_config());
    assert_eq!(err.to_string(), "2: threshold must be 0.0 to 1.0");
    assert!(matches!("ngram".parse::<Algorithm>(), Err(Error::InvalidAlgorithmName { .. })));
}
