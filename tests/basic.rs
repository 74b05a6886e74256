use marten_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::{clause::CClause, literal::CLiteral},
};

fn context_with(clauses: &[&[CLiteral]]) -> Context {
    let mut the_context = Context::from_config(Config::default());
    for clause in clauses {
        for literal in clause.iter() {
            assert!(the_context.ensure_atoms(literal.unsigned_abs()).is_ok());
        }
        assert!(the_context.add_clause(clause.to_vec()).is_ok());
    }
    the_context
}

mod basic {

    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = context_with(&[&[1]]);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model(), Some(vec![1]));
    }

    #[test]
    fn complementary_units() {
        let mut the_context = context_with(&[&[1], &[-1]]);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.model(), None);
    }

    #[test]
    fn conflict() {
        let mut the_context = context_with(&[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2]]);
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn implications_to_a_shared_atom() {
        let mut the_context = context_with(&[&[1, 2], &[-1, 3], &[-2, 3]]);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let model = the_context.model().expect("model of a satisfiable formula");
        assert!(model.contains(&3));
        assert!(the_context.satisfies_original_formula());
    }

    #[test]
    fn propagation_at_the_top_level() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = "1 0\n-1 -2 0\n2 0\n";
        assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn unit_forces_a_search() {
        let mut the_context = Context::from_config(Config::default());
        let dimacs = "-1 2 3 0\n-2 0\n1 2 0\n";
        assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let model = the_context.model().expect("model of a satisfiable formula");
        assert_eq!(model, vec![1, -2, 3]);
    }

    #[test]
    fn empty_formula() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model(), Some(vec![]));
    }

    #[test]
    fn free_atoms_are_valued() {
        let mut the_context = Context::from_config(Config::default());
        let _ = the_context.fresh_or_max_literals(4);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model().map(|model| model.len()), Some(4));
    }

    #[test]
    fn empty_clause() {
        let mut the_context = context_with(&[&[1, 2]]);
        assert!(the_context.add_clause(CClause::new()).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn duplicates() {
        let mut the_context = context_with(&[&[1, 2, 2]]);
        let database = the_context.clause_db.original_clauses().collect::<Vec<_>>();
        assert_eq!(database.len(), 1);
        assert_eq!(database[0].len(), 2);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn tautology_skip() {
        let mut the_context = context_with(&[]);
        let _ = the_context.fresh_or_max_literals(2);
        assert_eq!(the_context.add_clause(vec![1, 2, -1]), Ok(ClauseOk::Tautology));
        assert_eq!(the_context.clause_db.original_count(), 0);
    }

    #[test]
    fn solving_twice_gives_the_same_report() {
        let mut the_context = context_with(&[&[1, 2], &[-1, 2], &[1, -2]]);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model(), Some(vec![1, 2]));
    }

    #[test]
    fn clauses_added_after_a_solve() {
        let mut the_context = context_with(&[&[-1, 2], &[1, -2], &[-1, -2]]);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model(), Some(vec![-1, -2]));

        assert!(the_context.add_clause(vec![1, 2]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }
}
