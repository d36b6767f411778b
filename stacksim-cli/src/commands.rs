//! CLI command implementations.

use std::fs;

use stacksim_common::{LoadError, Opcode, Program};
use stacksim_vm::{Machine, DEFAULT_MEMORY_SIZE};

/// Assemble, load, and execute a listing file.
pub fn run(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: run requires an input file");
        eprintln!("Usage: stacksim run <file> [--memory N]");
        return Err(1);
    }

    let input = &args[0];
    let memory_size = parse_memory(&args[1..])?;
    let program = read_listing(input)?;
    let mut machine = load_into_machine(&program, memory_size)?;

    match machine.execute() {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

/// Assemble and load a listing file without executing it.
pub fn check(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: check requires an input file");
        eprintln!("Usage: stacksim check <file> [--memory N]");
        return Err(1);
    }

    let input = &args[0];
    let memory_size = parse_memory(&args[1..])?;
    let program = read_listing(input)?;
    load_into_machine(&program, memory_size)?;

    println!("OK: {input} ({} instructions)", program.len());
    Ok(())
}

/// Print the canonical form of a listing file.
pub fn format(args: &[String]) -> Result<(), i32> {
    if args.is_empty() {
        eprintln!("error: format requires an input file");
        eprintln!("Usage: stacksim format <file>");
        return Err(1);
    }

    let program = read_listing(&args[0])?;
    print!("{}", stacksim_assembler::format_listing(&program));
    Ok(())
}

/// Build and run the bundled sample program through the fluent interface.
///
/// A routine at 50 multiplies the top two stack values, prints the product,
/// and returns through the address its caller pushed. Main prints 1009,
/// sets up the call, and stops at 6, the address it pushed as the return.
pub fn demo() -> Result<(), i32> {
    let mut machine = Machine::new(DEFAULT_MEMORY_SIZE);

    if let Err(e) = key_in_demo(&mut machine) {
        eprintln!("error: {e}");
        return Err(2);
    }

    match machine.execute() {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(3)
        }
    }
}

// --- Helpers ---

/// Key the sample program in through the fluent loader interface.
fn key_in_demo(machine: &mut Machine) -> Result<(), LoadError> {
    // The multiply-and-print routine.
    machine
        .set_address(50)?
        .insert(Opcode::Mult, None)?
        .insert(Opcode::Print, None)?
        .insert(Opcode::Ret, None)?;

    // Main: print 1009, push the return address and the factors, call.
    machine
        .set_address(0)?
        .insert(Opcode::Push, Some(1009))?
        .insert(Opcode::Print, None)?
        .insert(Opcode::Push, Some(6))?
        .insert(Opcode::Push, Some(101))?
        .insert(Opcode::Push, Some(10))?
        .insert(Opcode::Call, Some(50))?
        .insert(Opcode::Stop, None)?;
    Ok(())
}

/// Read and assemble a listing file.
fn read_listing(path: &str) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;

    stacksim_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}

/// Load a program into a fresh machine, mapping failures to exit code 2.
fn load_into_machine(program: &Program, memory_size: usize) -> Result<Machine, i32> {
    let mut machine = Machine::new(memory_size);
    machine.load(program).map_err(|e| {
        eprintln!("error: {e}");
        2
    })?;
    Ok(machine)
}

/// Parse the optional `--memory N` flag.
fn parse_memory(args: &[String]) -> Result<usize, i32> {
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--memory" {
            let Some(value) = args.get(i + 1) else {
                eprintln!("error: --memory requires a value");
                return Err(1);
            };
            return value.parse().map_err(|_| {
                eprintln!("error: invalid memory size '{value}'");
                1
            });
        }
        i += 1;
    }
    Ok(DEFAULT_MEMORY_SIZE)
}
