use persons::errors::ErrorCode;

#[test]
fn error_code_has_correct_status() {
    assert_eq!(ErrorCode::PersonNotFound.status(), 404);
    assert_eq!(ErrorCode::EmailTaken.status(), 404);
    assert_eq!(ErrorCode::InternalDatabase.status(), 500);
}

#[test]
fn error_code_to_problem_works() {
    let problem = ErrorCode::PersonNotFound.to_problem("No records found for id 1");

    assert_eq!(problem.status, 404);
    assert_eq!(problem.title, "Person Not Found");
    assert_eq!(problem.code, "persons.person.not_found.v1");
    assert_eq!(problem.detail, "No records found for id 1");
    assert_eq!(
        problem.type_url,
        "https://errors.example.com/persons.person.not_found.v1"
    );
}

#[test]
fn error_code_def_is_consistent() {
    let def = ErrorCode::EmailTaken.def();

    assert_eq!(def.status, 404);
    assert_eq!(def.title, "Email Already Exists");
    assert_eq!(def.code, "persons.person.email_taken.v1");
    assert_eq!(
        def.type_url,
        "https://errors.example.com/persons.person.email_taken.v1"
    );
}

#[test]
fn codes_are_unique() {
    let mut codes: Vec<&str> = ErrorCode::ALL.iter().map(|c| c.code()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), ErrorCode::ALL.len());
}
