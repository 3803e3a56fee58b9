//! Full transcript of the demonstration run.

use roster::Console;

const TRANSCRIPT: &str = "\
Eager - Bob Jones's salary is 60000.3
Eager - Sarah Jameson's salary is 80000.1
Deferred - Bob Jones's salary is 60000.3
Deferred - Sarah Jameson's salary is 80000.1
Deferred - Sam Sulek's salary is 100000.20
Accessing employee: Bob Jones
Lazy - Bob Jones's salary is 60000.3
Accessing employee: Sarah Jameson
Lazy - Sarah Jameson's salary is 80000.1
Accessing employee: Douglas Roberts
Accessing employee: Jane Stevens
Accessing employee: Sam Sulek
Lazy - Sam Sulek's salary is 100000.20
Accessing employee: Bob Jones
Accessing employee: Sarah Jameson
Accessing employee: Douglas Roberts
Accessing employee: Jane Stevens
Accessing employee: Sam Sulek
Accessing employee: Jonah Davis
Immediate - Bob Jones's salary is 60000.3
Immediate - Sarah Jameson's salary is 80000.1
Immediate - Sam Sulek's salary is 100000.20
Immediate - Jonah Davis's salary is 120000.20
Eager (unchanged) - Bob Jones's salary is 60000.3
Eager (unchanged) - Sarah Jameson's salary is 80000.1
";

fn run_demo() -> String {
    let console = Console::new(Vec::new());
    roster::demo::run(&console).unwrap();
    console.with_output(|buf| String::from_utf8(buf.clone()).unwrap())
}

#[test]
fn transcript_matches() {
    assert_eq!(run_demo(), TRANSCRIPT);
}

#[test]
fn runs_are_independent() {
    assert_eq!(run_demo(), run_demo());
}

#[test]
fn later_hires_never_reach_the_eager_result() {
    let transcript = run_demo();
    let eager: Vec<&str> = transcript
        .lines()
        .filter(|l| l.starts_with("Eager"))
        .collect();

    assert_eq!(eager.len(), 4);
    assert!(eager.iter().all(|l| !l.contains("Sam") && !l.contains("Jonah")));
}

#[test]
fn immediate_visits_all_precede_results() {
    let transcript = run_demo();
    let tail: Vec<&str> = transcript
        .lines()
        .skip_while(|l| !l.starts_with("Lazy - Sam"))
        .skip(1)
        .collect();

    let first_result = tail
        .iter()
        .position(|l| l.starts_with("Immediate"))
        .unwrap();
    assert_eq!(first_result, 6);
    assert!(tail[..6].iter().all(|l| l.starts_with("Accessing employee: ")));
}
