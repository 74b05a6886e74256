//! Properties of solves on small random formulas, checked against exhaustive search.

use std::{cell::RefCell, rc::Rc, time::Duration};

use marten_sat::{
    config::{vsids::VSIDS, Config, DecisionHeuristic, RestartPolicy},
    context::Context,
    db::ClauseKey,
    generic::random::MinimalPCG32,
    procedures::{analysis::AnalysisResult, decision::DecisionOk},
    reports::Report,
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        consequence::AssignmentSource,
        literal::{CLiteral, Literal},
    },
    types::err::BCPError,
};

use rand::{Rng, SeedableRng};

/// A random formula of `clauses` clauses of `width` distinct atoms, over `atoms` atoms.
fn random_formula(seed: u64, atoms: Atom, clauses: usize, width: usize) -> Vec<CClause> {
    let mut rng = MinimalPCG32::seed_from_u64(seed);
    let mut formula = Vec::with_capacity(clauses);

    while formula.len() < clauses {
        let mut clause: CClause = Vec::with_capacity(width);
        while clause.len() < width {
            let atom = rng.random_range(1..=atoms);
            if clause.iter().any(|literal| literal.atom() == atom) {
                continue;
            }
            clause.push(CLiteral::new(atom, rng.random_bool(0.5)));
        }
        formula.push(clause);
    }

    formula
}

/// Whether the formula holds on the assignment, with bit `a - 1` of `assignment` the value of atom `a`.
fn holds_on(clause: &CClause, assignment: u32) -> bool {
    clause
        .iter()
        .any(|literal| ((assignment >> (literal.atom() - 1)) & 1 == 1) == literal.polarity())
}

/// Every assignment to the atoms which satisfies the formula.
fn models(atoms: Atom, formula: &[CClause]) -> Vec<u32> {
    (0..(1_u32 << atoms))
        .filter(|assignment| formula.iter().all(|clause| holds_on(clause, *assignment)))
        .collect()
}

fn context_from(config: Config, atoms: Atom, formula: &[CClause]) -> Context {
    let mut the_context = Context::from_config(config);
    assert!(the_context.ensure_atoms(atoms).is_ok());
    for clause in formula {
        assert!(the_context.add_clause(clause.clone()).is_ok());
    }
    the_context
}

/// A configuration which exercises restarts and reductions on small formulas.
fn busy_config() -> Config {
    let mut config = Config::default();
    config.restart_policy.value = RestartPolicy::Luby { unit: 2 };
    config.reduction_interval.value = 4;
    config
}

fn check_against_exhaustive_search(config: Config, seeds: std::ops::Range<u64>) {
    let atoms = 10;
    for seed in seeds {
        let formula = random_formula(seed, atoms, 43, 3);
        let expected = models(atoms, &formula);

        let mut the_context = context_from(config.clone(), atoms, &formula);
        let report = the_context.solve();

        match expected.is_empty() {
            true => {
                assert_eq!(report, Ok(Report::Unsatisfiable), "seed {seed}");
                assert_eq!(the_context.model(), None);
            }

            false => {
                assert_eq!(report, Ok(Report::Satisfiable), "seed {seed}");
                assert!(the_context.satisfies_original_formula(), "seed {seed}");

                let model = the_context.model().expect("model of a satisfiable formula");
                assert_eq!(model.len(), atoms as usize);
                assert!(formula.iter().all(|clause| clause
                    .literals()
                    .any(|literal| model.contains(literal))));
            }
        }
    }
}

mod soundness {
    use super::*;

    #[test]
    fn default_config() {
        check_against_exhaustive_search(Config::default(), 0..60);
    }

    #[test]
    fn frequent_restarts_and_reductions() {
        check_against_exhaustive_search(busy_config(), 60..120);
    }

    #[test]
    fn fixed_order_chaff_geometric() {
        let mut config = busy_config();
        config.decision_heuristic.value = DecisionHeuristic::FixedOrder;
        config.vsids_variant.value = VSIDS::Chaff;
        config.restart_policy.value = RestartPolicy::Geometric {
            base: 3,
            factor: 1.5,
        };
        check_against_exhaustive_search(config, 120..160);
    }

    #[test]
    fn no_restarts_or_reductions() {
        let mut config = Config::default();
        config.restart_policy.value = RestartPolicy::Off;
        config.reduction_interval.value = 0;
        check_against_exhaustive_search(config, 160..200);
    }

    #[test]
    fn random_decisions() {
        let mut config = busy_config();
        config.random_decision_bias.value = 0.3;
        config.phase_saving.value = false;
        config.polarity_lean.value = 0.5;
        config.seed.value = 7;
        check_against_exhaustive_search(config, 200..240);
    }

    #[test]
    fn keep_all_learned_clauses() {
        let mut config = busy_config();
        config.clause_db.lbd_bound.value = u8::MAX;
        check_against_exhaustive_search(config, 240..260);
    }
}

mod learning {
    use super::*;

    #[test]
    fn learned_clauses_are_entailed() {
        let atoms = 10;
        for seed in 300..340 {
            let formula = random_formula(seed, atoms, 40, 3);
            let expected = models(atoms, &formula);

            let learned = Rc::new(RefCell::new(Vec::<CClause>::default()));
            let learned_sink = learned.clone();

            let mut the_context = context_from(busy_config(), atoms, &formula);
            the_context.set_callback_addition(Box::new(move |clause: &CClause| {
                learned_sink.borrow_mut().push(clause.clone())
            }));
            assert!(the_context.solve().is_ok());

            for clause in learned.borrow().iter() {
                let mut atoms_seen = clause.atoms().collect::<Vec<_>>();
                atoms_seen.sort_unstable();
                atoms_seen.dedup();
                assert_eq!(atoms_seen.len(), clause.len(), "seed {seed}: {clause:?}");

                assert!(
                    expected.iter().all(|model| holds_on(clause, *model)),
                    "seed {seed}: {clause:?} is not entailed"
                );
            }
        }
    }

    #[test]
    fn learned_clauses_are_false_when_derived() {
        let atoms = 10;
        for seed in 340..370 {
            let formula = random_formula(seed, atoms, 43, 3);
            let mut the_context = context_from(Config::default(), atoms, &formula);

            loop {
                let key = match the_context.propagate() {
                    Ok(()) => match the_context.make_decision() {
                        DecisionOk::Literal(_) => continue,
                        DecisionOk::Exhausted => break,
                    },
                    Err(BCPError::Conflict(key)) => key,
                    Err(e) => panic!("seed {seed}: {e:?}"),
                };

                let level = the_context.trail.level();
                if level == 0 {
                    break;
                }

                let derived = the_context
                    .resolution_buffer
                    .resolve_through_current_level(
                        &key,
                        &mut the_context.clause_db,
                        &the_context.atom_db,
                        &the_context.trail,
                    )
                    .expect("resolution at a conflict");

                assert!(
                    derived
                        .iter()
                        .all(|literal| the_context.literal_value(*literal) == Some(false)),
                    "seed {seed}: {derived:?} is not false when derived"
                );

                let at_level = derived
                    .iter()
                    .filter(|literal| the_context.atom_db.level_of(literal.atom()) == Some(level))
                    .count();
                assert_eq!(at_level, 1, "seed {seed}: {derived:?}");
                assert_eq!(the_context.atom_db.level_of(derived[0].atom()), Some(level));

                match the_context.conflict_analysis(&key) {
                    Ok(AnalysisResult::FundamentalConflict) => break,

                    Ok(AnalysisResult::UnitClause { literal }) => {
                        let source = AssignmentSource::Unit(ClauseKey::AdditionUnit(literal));
                        the_context.record_assignment(literal, source);
                    }

                    Ok(AnalysisResult::AssertingClause { key, literal }) => {
                        the_context.record_assignment(literal, AssignmentSource::BCP(key));
                    }

                    Err(e) => panic!("seed {seed}: {e:?}"),
                }
            }
        }
    }

    #[test]
    fn learning_on_an_unsatisfiable_formula() {
        let learned = Rc::new(RefCell::new(0_usize));
        let learned_count = learned.clone();

        let mut the_context = Context::from_config(Config::default());
        let dimacs = "
p cnf 3 8
 1  2  3 0
-1  2  3 0
 1 -2  3 0
-1 -2  3 0
 1  2 -3 0
-1  2 -3 0
 1 -2 -3 0
-1 -2 -3 0
";
        assert!(the_context.read_dimacs(dimacs.as_bytes()).is_ok());
        the_context.set_callback_addition(Box::new(move |_: &CClause| {
            *learned_count.borrow_mut() += 1
        }));

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert!(*learned.borrow() > 0);
        assert!(the_context.counters.total_conflicts > 0);
    }
}

mod search {
    use super::*;

    #[test]
    fn watches_hold_after_propagation() {
        let atoms = 12;
        for seed in 400..430 {
            let formula = random_formula(seed, atoms, 30, 4);
            let mut the_context = context_from(Config::default(), atoms, &formula);
            assert!(the_context.watch_invariant_holds());

            loop {
                match the_context.propagate() {
                    Ok(()) => assert!(the_context.watch_invariant_holds(), "seed {seed}"),
                    Err(_) => break,
                }
                if the_context.make_decision() == DecisionOk::Exhausted {
                    break;
                }
            }
        }
    }

    #[test]
    fn watches_hold_after_a_solve() {
        let atoms = 10;
        for seed in 430..450 {
            let formula = random_formula(seed, atoms, 38, 3);
            let mut the_context = context_from(busy_config(), atoms, &formula);
            if the_context.solve() == Ok(Report::Satisfiable) {
                assert!(the_context.watch_invariant_holds(), "seed {seed}");
            }
        }
    }

    #[test]
    fn backjump_to_the_top_level() {
        let formula = random_formula(500, 12, 20, 3);
        let mut the_context = context_from(Config::default(), 12, &formula);
        let top_level = the_context.trail.top_level_assignments().to_vec();

        for _ in 0..4 {
            if the_context.propagate().is_err() {
                break;
            }
            if the_context.make_decision() == DecisionOk::Exhausted {
                break;
            }
        }
        assert!(the_context.trail.level() > 0);

        the_context.backjump(0);
        assert_eq!(the_context.trail.level(), 0);
        assert_eq!(the_context.trail.literals, top_level);

        let valued = (1..=12)
            .filter(|atom| the_context.atom_db.value_of(*atom).is_some())
            .count();
        assert_eq!(valued, top_level.len());
    }

    #[test]
    fn restarts_keep_the_formula() {
        let atoms = 10;
        for seed in 600..620 {
            let formula = random_formula(seed, atoms, 43, 3);
            let mut config = Config::default();
            config.conflict_limit.value = 3;

            let mut the_context = context_from(config, atoms, &formula);
            assert!(the_context.solve().is_ok());

            let originals = the_context.clause_db.original_count();
            let additions = the_context.clause_db.addition_count();
            let restarts = the_context.counters.restarts;

            the_context.restart();
            the_context.restart();

            assert_eq!(the_context.trail.level(), 0);
            assert_eq!(the_context.clause_db.original_count(), originals);
            assert_eq!(the_context.clause_db.addition_count(), additions);
            assert_eq!(the_context.counters.restarts, restarts + 2);
            assert_eq!(the_context.counters.fresh_conflicts, 0);
        }
    }
}

mod limits {
    use super::*;

    #[test]
    fn terminate_callback() {
        let formula = random_formula(700, 10, 20, 3);
        let mut the_context = context_from(Config::default(), 10, &formula);
        the_context.set_callback_terminate(Box::new(|| true));

        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.model(), None);
        assert_eq!(the_context.counters.total_decisions, 0);
    }

    #[test]
    fn terminate_after_some_polls() {
        let polls = Rc::new(RefCell::new(0));
        let poll_count = polls.clone();

        let formula = random_formula(701, 10, 20, 3);
        let mut the_context = context_from(Config::default(), 10, &formula);
        the_context.set_callback_terminate(Box::new(move || {
            *poll_count.borrow_mut() += 1;
            *poll_count.borrow() > 2
        }));

        let report = the_context.solve();
        assert!(report.is_ok());
        if report == Ok(Report::Unknown) {
            assert_eq!(*polls.borrow(), 3);
        }
    }

    #[test]
    fn time_limit() {
        let mut config = Config::default();
        config.time_limit.value = Duration::from_nanos(1);

        let formula = random_formula(702, 10, 20, 3);
        let mut the_context = context_from(config, 10, &formula);

        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert_eq!(the_context.model(), None);
        assert!(the_context.counters.time > Duration::from_nanos(1));
    }

    #[test]
    fn conflict_limit() {
        let mut config = Config::default();
        config.conflict_limit.value = 1;

        let mut the_context = Context::from_config(config);
        let holes = 5;
        let pigeons = 6;
        let atom = |pigeon: i32, hole: i32| pigeon * holes + hole + 1;

        assert!(the_context.ensure_atoms((pigeons * holes) as Atom).is_ok());
        for pigeon in 0..pigeons {
            let clause = (0..holes).map(|hole| atom(pigeon, hole)).collect::<CClause>();
            assert!(the_context.add_clause(clause).is_ok());
        }
        for hole in 0..holes {
            for a in 0..pigeons {
                for b in (a + 1)..pigeons {
                    assert!(the_context.add_clause(vec![-atom(a, hole), -atom(b, hole)]).is_ok());
                }
            }
        }

        assert_eq!(the_context.solve(), Ok(Report::Unknown));
        assert!(the_context.counters.total_conflicts >= 1);
        assert_eq!(the_context.model(), None);
    }
}
