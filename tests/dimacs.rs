use marten_sat::{
    builder::ParserInfo,
    config::Config,
    context::Context,
    reports::Report,
    types::err::{ErrorKind, ParseError},
};

fn read(dimacs: &str) -> (Context, Result<ParserInfo, ErrorKind>) {
    let mut the_context = Context::from_config(Config::default());
    let result = the_context.read_dimacs(dimacs.as_bytes());
    (the_context, result)
}

mod dimacs {
    use super::*;

    #[test]
    fn counts() {
        let (mut the_context, result) = read(
            "c A comment
p cnf 5 3
 1 -2  0
 2  3 -4 0
c Another comment

-1 4 0
",
        );

        let info = result.expect("well formed DIMACS");
        assert_eq!(info.expected_atoms, Some(5));
        assert_eq!(info.expected_clauses, Some(3));
        assert_eq!(info.added_atoms, 5);
        assert_eq!(info.added_clauses, 3);

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model().map(|model| model.len()), Some(5));
    }

    #[test]
    fn clauses_span_lines() {
        let (_, result) = read("p cnf 3 2\n1 2\n3 0 -1\n-2 0\n");
        let info = result.expect("well formed DIMACS");
        assert_eq!(info.added_clauses, 2);
        assert_eq!(info.added_atoms, 3);
    }

    #[test]
    fn no_preamble() {
        let (mut the_context, result) = read("1 2 0\n-1 0\n");
        let info = result.expect("well formed DIMACS");
        assert_eq!(info.expected_atoms, None);
        assert_eq!(info.added_atoms, 2);

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model(), Some(vec![-1, 2]));
    }

    #[test]
    fn final_clause_without_zero() {
        let (the_context, result) = read("p cnf 2 2\n1 2 0\n-1 -2");
        assert_eq!(result.map(|info| info.added_clauses), Ok(2));
        assert_eq!(the_context.clause_db.original_count(), 2);
    }

    #[test]
    fn percent_ends_the_formula() {
        let (_, result) = read("p cnf 2 1\n1 2 0\n%\n0\n");
        assert_eq!(result.map(|info| info.added_clauses), Ok(1));
    }

    #[test]
    fn mismatched_clause_count_is_accepted() {
        let (_, result) = read("p cnf 2 4\n1 2 0\n");
        let info = result.expect("well formed DIMACS");
        assert_eq!(info.expected_clauses, Some(4));
        assert_eq!(info.added_clauses, 1);
    }

    #[test]
    fn unsatisfiable_from_dimacs() {
        let (mut the_context, result) = read("p cnf 2 4\n1 2 0\n-1 2 0\n1 -2 0\n-1 -2 0\n");
        assert!(result.is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }
}

mod malformed {
    use super::*;

    #[test]
    fn bad_token() {
        let (_, result) = read("p cnf 2 1\n1 two 0\n");
        assert_eq!(result, Err(ErrorKind::Parse(ParseError::Line(2))));
    }

    #[test]
    fn atom_out_of_range() {
        let (_, result) = read("p cnf 2 1\n1 3 0\n");
        assert_eq!(result, Err(ErrorKind::Parse(ParseError::AtomOutOfRange(2, 3))));
    }

    #[test]
    fn late_preamble() {
        let (_, result) = read("1 2 0\np cnf 2 1\n");
        assert_eq!(result, Err(ErrorKind::Parse(ParseError::MisplacedProblem(2))));
    }

    #[test]
    fn second_preamble() {
        let (_, result) = read("p cnf 2 1\np cnf 2 1\n1 2 0\n");
        assert_eq!(result, Err(ErrorKind::Parse(ParseError::MisplacedProblem(2))));
    }

    #[test]
    fn bad_preamble() {
        for preamble in ["p dnf 2 1\n", "p cnf two 1\n", "p cnf 2\n"] {
            let (_, result) = read(preamble);
            assert_eq!(result, Err(ErrorKind::Parse(ParseError::ProblemSpecification)));
        }
    }
}
