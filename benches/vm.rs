//! Benchmarks for the bytecode dispatch loop and string interning.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vespervm::vm::{Chunk, Op, Vm};
use vespervm::Value;

/// Build a chunk that keeps one running total on the stack and folds
/// `additions` constants into it, then pops and returns.
fn arithmetic_chunk(additions: usize) -> Chunk {
    let mut chunk = Chunk::new();
    let one = chunk.add_constant(Value::Int(1));
    chunk.write_op(Op::Constant, 1);
    chunk.write(one, 1);
    for _ in 0..additions {
        chunk.write_op(Op::Constant, 1);
        chunk.write(one, 1);
        chunk.write_op(Op::Add, 1);
    }
    chunk.write_op(Op::Pop, 1);
    chunk.write_op(Op::Return, 1);
    chunk
}

fn dispatch_throughput(c: &mut Criterion) {
    let chunk = arithmetic_chunk(1000);
    c.bench_function("dispatch_add_1000", |b| {
        b.iter(|| {
            let mut vm = Vm::new();
            vm.run(black_box(&chunk)).expect("runtime error");
        })
    });
}

fn interning(c: &mut Criterion) {
    let words: Vec<String> = (0..512).map(|i| format!("sym_{}", i)).collect();

    c.bench_function("intern_cold_512", |b| {
        b.iter(|| {
            let mut vm = Vm::new();
            for word in &words {
                black_box(vm.strings_mut().intern(word));
            }
        })
    });

    c.bench_function("intern_hot_512", |b| {
        let mut vm = Vm::new();
        for word in &words {
            vm.strings_mut().intern(word);
        }
        b.iter(|| {
            for word in &words {
                black_box(vm.strings_mut().intern(word));
            }
        })
    });
}

fn global_table(c: &mut Criterion) {
    c.bench_function("globals_set_get_256", |b| {
        let mut vm = Vm::new();
        let names: Vec<Value> = (0..256)
            .map(|i| Value::Str(vm.strings_mut().intern(&format!("g{}", i))))
            .collect();
        b.iter(|| {
            for (i, name) in names.iter().enumerate() {
                vm.globals_mut().set(name.clone(), Value::Int(i as i32));
            }
            for name in &names {
                black_box(vm.globals().get(name));
            }
        })
    });
}

criterion_group!(benches, dispatch_throughput, interning, global_table);
criterion_main!(benches);
