use ninegrid::{
    api::{self, CheckReply, CheckRequest, Conflict, ErrorReply, SolveRequest},
    logger::SolveLog,
    Error,
};
use pretty_assertions::assert_eq;

const PUZZLE: &str =
    "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
const SOLUTION: &str =
    "135762984946381257728459613694517832812936745357824196473298561581673429269145378";

fn check_req(puzzle: &str, coordinate: &str, value: &str) -> CheckRequest {
    CheckRequest {
        puzzle: Some(puzzle.into()),
        coordinate: Some(coordinate.into()),
        value: Some(value.into()),
    }
}

fn solve_req(puzzle: &str) -> SolveRequest {
    SolveRequest { puzzle: Some(puzzle.into()) }
}

#[test]
fn solve_returns_the_solution() {
    let reply = api::solve(&solve_req(PUZZLE), &mut SolveLog::quiet()).unwrap();
    assert_eq!(reply.solution, SOLUTION);
}

#[test]
fn solve_with_missing_puzzle() {
    let err = api::solve(&SolveRequest::default(), &mut SolveLog::quiet()).unwrap_err();
    assert_eq!(err, Error::MissingFields);
    let err = api::solve(&solve_req(""), &mut SolveLog::quiet()).unwrap_err();
    assert_eq!(err, Error::MissingFields);
}

#[test]
fn solve_with_invalid_characters() {
    let corrupted = format!("{}X{}", &PUZZLE[..10], &PUZZLE[11..]);
    let err = api::solve(&solve_req(&corrupted), &mut SolveLog::quiet()).unwrap_err();
    assert_eq!(err, Error::InvalidCharacters);
    assert_eq!(err.to_string(), "Invalid characters in puzzle");
}

#[test]
fn solve_with_bad_length() {
    let short = &PUZZLE[1..];
    let err = api::solve(&solve_req(short), &mut SolveLog::quiet()).unwrap_err();
    assert_eq!(err, Error::InvalidLength);
    assert_eq!(err.to_string(), "Expected puzzle to be 81 characters long");

    let long = format!("{}4", PUZZLE);
    let err = api::solve(&solve_req(&long), &mut SolveLog::quiet()).unwrap_err();
    assert_eq!(err, Error::InvalidLength);
}

#[test]
fn solve_unsolvable_puzzle() {
    let unsolvable =
        "115..2284..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    let err = api::solve(&solve_req(unsolvable), &mut SolveLog::quiet()).unwrap_err();
    assert_eq!(err, Error::Unsolvable);
    assert_eq!(err.to_string(), "Puzzle cannot be solved");
}

#[test]
fn check_with_no_conflict() {
    let reply = api::check(&check_req(PUZZLE, "A2", "3")).unwrap();
    assert_eq!(reply, CheckReply { valid: true, conflict: vec![] });
}

#[test]
fn check_with_single_conflict() {
    let reply = api::check(&check_req(PUZZLE, "A2", "4")).unwrap();
    assert_eq!(reply, CheckReply { valid: false, conflict: vec![Conflict::Row] });
}

#[test]
fn check_with_two_conflicts() {
    let reply = api::check(&check_req(PUZZLE, "A2", "1")).unwrap();
    assert_eq!(
        reply,
        CheckReply { valid: false, conflict: vec![Conflict::Row, Conflict::Region] }
    );
}

#[test]
fn check_with_all_conflicts_in_evaluation_order() {
    let reply = api::check(&check_req(PUZZLE, "A2", "2")).unwrap();
    assert_eq!(
        reply,
        CheckReply {
            valid: false,
            conflict: vec![Conflict::Column, Conflict::Row, Conflict::Region],
        }
    );
}

#[test]
fn check_against_own_filled_cell_is_valid() {
    // A1 already holds 1
    let reply = api::check(&check_req(PUZZLE, "A1", "1")).unwrap();
    assert_eq!(reply, CheckReply { valid: true, conflict: vec![] });
}

#[test]
fn check_with_missing_fields() {
    let req = CheckRequest {
        puzzle: None,
        coordinate: Some("A2".into()),
        value: Some("3".into()),
    };
    assert_eq!(api::check(&req).unwrap_err(), Error::MissingFields);
    assert_eq!(Error::MissingFields.to_string(), "Required field(s) missing");

    // present but empty counts as missing
    assert_eq!(api::check(&check_req(PUZZLE, "", "3")).unwrap_err(), Error::MissingFields);
}

#[test]
fn check_surfaces_validation_errors() {
    let corrupted = format!("{}X{}", &PUZZLE[..5], &PUZZLE[6..]);
    assert_eq!(
        api::check(&check_req(&corrupted, "A2", "3")).unwrap_err(),
        Error::InvalidCharacters
    );
    let long = format!("{}5", PUZZLE);
    assert_eq!(
        api::check(&check_req(&long, "A2", "3")).unwrap_err(),
        Error::InvalidLength
    );
}

#[test]
fn check_with_invalid_coordinate() {
    for coord in ["Z4", "A0", "A10", "J1", "5A", "A"] {
        assert_eq!(
            api::check(&check_req(PUZZLE, coord, "4")).unwrap_err(),
            Error::InvalidCoordinate,
            "coordinate {:?}",
            coord
        );
    }
    assert_eq!(Error::InvalidCoordinate.to_string(), "Invalid coordinate");
}

#[test]
fn coordinate_letter_is_case_insensitive() {
    let upper = api::check(&check_req(PUZZLE, "A2", "4")).unwrap();
    let lower = api::check(&check_req(PUZZLE, "a2", "4")).unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn check_with_invalid_value() {
    for value in ["25", "0", "abc", "1.5", ""] {
        let err = api::check(&check_req(PUZZLE, "A2", value)).unwrap_err();
        let expected = if value.is_empty() { Error::MissingFields } else { Error::InvalidValue };
        assert_eq!(err, expected, "value {:?}", value);
    }
    assert_eq!(Error::InvalidValue.to_string(), "Invalid value");
}

#[test]
fn check_request_accepts_numeric_value() {
    let req: CheckRequest = serde_json::from_str(
        &format!(r#"{{"puzzle":"{}","coordinate":"A2","value":4}}"#, PUZZLE),
    )
    .unwrap();
    let reply = api::check(&req).unwrap();
    assert_eq!(reply.conflict, vec![Conflict::Row]);
}

#[test]
fn reply_serialization_shapes() {
    let reply = api::check(&check_req(PUZZLE, "A2", "2")).unwrap();
    assert_eq!(
        serde_json::to_string(&reply).unwrap(),
        r#"{"valid":false,"conflict":["column","row","region"]}"#
    );

    let reply = api::solve(&solve_req(PUZZLE), &mut SolveLog::quiet()).unwrap();
    assert_eq!(
        serde_json::to_string(&reply).unwrap(),
        format!(r#"{{"solution":"{}"}}"#, SOLUTION)
    );

    let err = ErrorReply::from(Error::Unsolvable);
    assert_eq!(
        serde_json::to_string(&err).unwrap(),
        r#"{"error":"Puzzle cannot be solved"}"#
    );
}
