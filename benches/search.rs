// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pharos-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pharos and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use pharos::model::{
    Field, FieldName, ObjectType, OperationKind, Schema, TypeBody, TypeDef, TypeName, TypeRef,
};
use pharos::query::{build_index, ranked_matches};

// Benchmark identity (keep stable):
// - Group names in this file: `index.build`, `search.ranked`
// - Case IDs must remain stable across refactors so results stay comparable
//   over time (e.g. `types_0200`, `query_use`).
fn synthetic_schema(type_count: usize, fields_per_type: usize) -> Schema {
    let mut schema = Schema::new();

    schema.insert_type(TypeDef::new(
        TypeName::new("ID").expect("type name"),
        TypeBody::Scalar,
    ));

    for type_idx in 0..type_count {
        let mut object = ObjectType::new();
        for field_idx in 0..fields_per_type {
            // Field types chain to the next object so the walk covers the
            // whole graph.
            let target = format!("Entity{:04}", (type_idx + field_idx + 1) % type_count);
            object.fields_mut().insert(
                FieldName::new(format!("rel{type_idx:04}x{field_idx:02}")).expect("field name"),
                Field::new(TypeRef::non_null(TypeRef::named(
                    TypeName::new(target).expect("type name"),
                ))),
            );
        }
        object.fields_mut().insert(
            FieldName::new("id").expect("field name"),
            Field::new(TypeRef::named(TypeName::new("ID").expect("type name"))),
        );
        schema.insert_type(TypeDef::new(
            TypeName::new(format!("Entity{type_idx:04}")).expect("type name"),
            TypeBody::Object(object),
        ));
    }

    schema.set_root(
        OperationKind::Query,
        Some(TypeName::new("Entity0000").expect("type name")),
    );
    schema
}

fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index.build");
    for (case, type_count, fields_per_type) in
        [("types_0200", 200, 8), ("types_1000", 1000, 8)]
    {
        let schema = synthetic_schema(type_count, fields_per_type);
        group.throughput(Throughput::Elements(type_count as u64));
        group.bench_function(case, |b| b.iter(|| build_index(black_box(&schema))));
    }
    group.finish();
}

fn bench_ranked_search(c: &mut Criterion) {
    let schema = synthetic_schema(1000, 8);
    let index = build_index(&schema);

    let mut group = c.benchmark_group("search.ranked");
    group.throughput(Throughput::Elements(index.len() as u64));
    for (case, query) in [
        ("query_use", "use"),
        ("query_rel", "rel00"),
        ("query_miss", "zzzzzz"),
    ] {
        group.bench_function(case, |b| {
            b.iter(|| ranked_matches(black_box(&index), black_box(query)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_ranked_search);
criterion_main!(benches);
