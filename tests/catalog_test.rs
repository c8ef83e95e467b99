use std::io::Write;

use attendance_calculator::catalog::MAX_EXTRA_DAYS;
use attendance_calculator::{Catalog, CatalogError, SubjectRecord};

#[test]
fn test_builtin_catalog() {
    let catalog = Catalog::builtin();
    let names: Vec<&str> = catalog.names().collect();

    assert_eq!(names, vec!["LOGIC", "DD", "OOPS", "DISCRETE", "FFA", "POE"]);
    assert_eq!(catalog.default_subject().name, "LOGIC");
    assert!(catalog
        .subjects()
        .iter()
        .all(|s| s.attended_classes <= s.total_classes));

    // The built-in table passes the same validation as any other catalog.
    assert!(Catalog::new(catalog.subjects().to_vec()).is_ok());
}

#[test]
fn test_find_subject() {
    let catalog = Catalog::builtin();
    let ffa = catalog.find("FFA").unwrap();
    assert_eq!(ffa, &SubjectRecord::new("FFA", 40, 27, 3));
    assert_eq!(ffa.projection().unwrap().len(), 4);
}

#[test]
fn test_unknown_subject() {
    let catalog = Catalog::builtin();
    match catalog.find("CHEMISTRY") {
        Err(CatalogError::UnknownSubject(name)) => assert_eq!(name, "CHEMISTRY"),
        other => panic!("expected UnknownSubject, got {:?}", other),
    }
}

#[test]
fn test_rejects_invalid_catalogs() {
    assert!(matches!(Catalog::new(vec![]), Err(CatalogError::Empty)));

    let duplicate = vec![
        SubjectRecord::new("DD", 60, 53, 4),
        SubjectRecord::new("DD", 10, 5, 1),
    ];
    assert!(matches!(
        Catalog::new(duplicate),
        Err(CatalogError::DuplicateName(name)) if name == "DD"
    ));

    let blank = vec![SubjectRecord::new("LOGIC", 55, 39, 4), SubjectRecord::new("  ", 1, 1, 1)];
    assert!(matches!(Catalog::new(blank), Err(CatalogError::EmptyName(1))));

    let over = vec![SubjectRecord::new("OOPS", 30, 34, 4)];
    assert!(matches!(
        Catalog::new(over),
        Err(CatalogError::AttendedExceedsTotal { attended_classes: 34, total_classes: 30, .. })
    ));
}

#[test]
fn test_load_catalog_from_csv() {
    let data = "Subject,Total Classes,Attended Classes,Max Days\n\
                PHYSICS,20,15,2\n\
                MATHS, 30 ,28,5\n";
    let catalog = Catalog::from_csv_reader(data.as_bytes()).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find("MATHS").unwrap(), &SubjectRecord::new("MATHS", 30, 28, 5));
}

#[test]
fn test_csv_bad_number() {
    let data = "Subject,Total Classes,Attended Classes,Max Days\nPHYSICS,20,-1,2\n";
    match Catalog::from_csv_reader(data.as_bytes()) {
        Err(CatalogError::InvalidNumber { column, value, .. }) => {
            assert_eq!(column, "Attended Classes");
            assert_eq!(value, "-1");
        }
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
}

#[test]
fn test_csv_rows_are_validated() {
    let data = "Subject,Total Classes,Attended Classes,Max Days\nPHYSICS,20,25,2\n";
    assert!(matches!(
        Catalog::from_csv_reader(data.as_bytes()),
        Err(CatalogError::AttendedExceedsTotal { .. })
    ));

    let header_only = "Subject,Total Classes,Attended Classes,Max Days\n";
    assert!(matches!(
        Catalog::from_csv_reader(header_only.as_bytes()),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn test_load_catalog_from_path() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "Subject,Total Classes,Attended Classes,Max Days").unwrap();
    writeln!(file, "LOGIC,55,39,4").unwrap();
    file.flush().unwrap();

    let catalog = Catalog::from_csv_path(file.path()).unwrap();
    assert_eq!(catalog.default_subject().name, "LOGIC");
}

#[test]
fn test_missing_csv_file() {
    assert!(matches!(
        Catalog::from_csv_path("/nonexistent/catalog.csv"),
        Err(CatalogError::Csv(_))
    ));
}

#[test]
fn test_csv_short_row() {
    let data = "Subject,Total Classes,Attended Classes,Max Days\nPHYSICS,20,15\n";
    assert!(matches!(
        Catalog::from_csv_reader(data.as_bytes()),
        Err(CatalogError::MissingColumns { expected: 4, found: 3, .. })
    ));
}

#[test]
fn test_csv_without_header() {
    let data = "LOGIC,55,39,4\nDD,60,53,4\n";
    match Catalog::from_csv_reader(data.as_bytes()) {
        Err(CatalogError::InvalidHeader { found }) => {
            assert_eq!(found, vec!["LOGIC", "55", "39", "4"]);
        }
        other => panic!("expected InvalidHeader, got {:?}", other),
    }
}

#[test]
fn test_csv_columns_out_of_order() {
    let data = "Subject,Attended Classes,Total Classes,Max Days\nLOGIC,39,55,4\n";
    assert!(matches!(
        Catalog::from_csv_reader(data.as_bytes()),
        Err(CatalogError::InvalidHeader { .. })
    ));
}

#[test]
fn test_extra_days_limit() {
    let at_limit = vec![SubjectRecord::new("LONG", 10, 5, MAX_EXTRA_DAYS)];
    let catalog = Catalog::new(at_limit).unwrap();
    assert_eq!(
        catalog.find("LONG").unwrap().projection().unwrap().len(),
        MAX_EXTRA_DAYS as usize + 1
    );

    let over = vec![SubjectRecord::new("X", 10, 5, MAX_EXTRA_DAYS + 1)];
    assert!(matches!(
        Catalog::new(over),
        Err(CatalogError::ExtraDaysTooLarge { max_extra_days, .. }) if max_extra_days == MAX_EXTRA_DAYS + 1
    ));

    let data = "Subject,Total Classes,Attended Classes,Max Days\nX,10,5,4000000000\n";
    assert!(matches!(
        Catalog::from_csv_reader(data.as_bytes()),
        Err(CatalogError::ExtraDaysTooLarge { max_extra_days: 4_000_000_000, .. })
    ));
}
