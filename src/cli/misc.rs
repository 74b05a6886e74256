use marten_sat::{builder::ParserInfo, context::Counters};

pub fn examine_parser_report(info: &ParserInfo) {
    match info.expected_atoms {
        Some(count) => println!("c Expected {count} atoms."),
        None => println!("c No preamble was found."),
    }

    println!("c Added    {} atoms.", info.added_atoms);

    if let Some(count) = info.expected_clauses {
        println!("c Expected {count} clauses.")
    }

    println!("c Added    {} clauses.", info.added_clauses);
}

pub fn print_counters(counters: &Counters) {
    println!("c Conflicts:    {}", counters.total_conflicts);
    println!("c Decisions:    {}", counters.total_decisions);
    println!("c Propagations: {}", counters.propagations);
    println!("c Restarts:     {}", counters.restarts);
    println!("c Reductions:   {}", counters.reductions);
    println!("c Time:         {:.3?}", counters.time);
}
