use criterion::*;
use nalgebra_glm::{Mat4, Vec3};
use std::sync::Arc;
use strata_ecs::prelude::*;

const COUNT: usize = 10000;

#[derive(Default, Clone)]
struct Transform(Mat4);

#[derive(Default, Clone)]
struct Translation(Vec3);

#[derive(Default, Clone)]
struct Rotation(Vec3);

#[derive(Default, Clone)]
struct Velocity(Vec3);

fn registry() -> Arc<ComponentRegistry> {
    let registry = Arc::new(ComponentRegistry::new());
    registry.register::<Transform>();
    registry.register::<Translation>();
    registry.register::<Rotation>();
    registry.register::<Velocity>();
    registry
}

fn create_entities(c: &mut Criterion) {
    c.bench_function("Create entities", |b| {
        let registry = registry();
        let ids = [
            registry.expect_id::<Transform>(),
            registry.expect_id::<Translation>(),
            registry.expect_id::<Rotation>(),
            registry.expect_id::<Velocity>(),
        ];

        b.iter_batched(
            || World::new(registry.clone()),
            |mut world| {
                for _ in 0..COUNT {
                    world.create_entity(&ids);
                }
                world
            },
            BatchSize::PerIteration,
        );
    });
}

fn destroy_entities(c: &mut Criterion) {
    c.bench_function("Destroy entities", |b| {
        let registry = registry();
        let ids = [
            registry.expect_id::<Transform>(),
            registry.expect_id::<Translation>(),
            registry.expect_id::<Rotation>(),
            registry.expect_id::<Velocity>(),
        ];

        b.iter_batched(
            || {
                let mut world = World::new(registry.clone());
                let entities: Vec<Entity> =
                    (0..COUNT).map(|_| world.create_entity(&ids)).collect();
                (world, entities)
            },
            |(mut world, entities)| {
                for entity in entities {
                    world.destroy_entity(entity);
                }
                world
            },
            BatchSize::PerIteration,
        );
    });
}

fn iterate_entities(c: &mut Criterion) {
    let registry = registry();
    let query = Query::new()
        .require(registry.expect_id::<Transform>())
        .require(registry.expect_id::<Translation>())
        .require(registry.expect_id::<Velocity>())
        .require(registry.expect_id::<Rotation>());

    let integrate = |chunk: ChunkView| {
        let transforms = unsafe { chunk.required_slice::<Transform>(0) };
        let translations = unsafe { chunk.required_slice::<Translation>(1) };
        let velocities = unsafe { chunk.required_slice::<Velocity>(2) };
        let rotations = unsafe { chunk.required_slice::<Rotation>(3) };

        for i in 0..chunk.len() {
            translations[i].0 += velocities[i].0;
            transforms[i].0 =
                Mat4::new_translation(&translations[i].0) * Mat4::new_rotation(rotations[i].0);
        }
    };

    let mut group = c.benchmark_group("Iterate entities");
    group.bench_function("Single-threaded", |b| {
        let mut world = World::new(registry.clone());
        for _ in 0..COUNT {
            world.spawn((
                Transform::default(),
                Translation::default(),
                Rotation::default(),
                Velocity::default(),
            ));
        }

        b.iter(|| world.iterate(&query, integrate));
    });

    group.bench_function("Multi-threaded", |b| {
        let mut world = World::new(registry.clone());
        for _ in 0..COUNT {
            world.spawn((
                Transform::default(),
                Translation::default(),
                Rotation::default(),
                Velocity::default(),
            ));
        }

        b.iter(|| world.par_iterate(&query, integrate));
    });
}

fn add_remove_components(c: &mut Criterion) {
    c.bench_function("Add and remove a component", |b| {
        let mut world = World::new(registry());
        let entities: Vec<Entity> = (0..COUNT)
            .map(|_| world.spawn((Translation::default(), Rotation::default())))
            .collect();

        b.iter(|| {
            for entity in &entities {
                world.add_component(*entity, Velocity::default());
            }
            for entity in &entities {
                world.remove_component::<Velocity>(*entity);
            }
        });
    });
}

criterion_group!(
    benchmarks,
    create_entities,
    destroy_entities,
    iterate_entities,
    add_remove_components
);
criterion_main!(benchmarks);
