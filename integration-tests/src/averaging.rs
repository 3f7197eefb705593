//! Signatures shaped like a federated averaging process over MNIST batches.

use cadence_process::{Computation, ENVELOPE_FIELDS};
use cadence_types::{
    DType, StructType, Type,
    factory::{at_clients, at_server},
};

/// A batch of flattened 28x28 images with integer labels.
pub fn batch() -> Type {
    StructType::named([
        ("x", Type::tensor(DType::Float32, [None, Some(784)])),
        ("y", Type::tensor(DType::Int64, [None, Some(1)])),
    ])
    .unwrap()
    .into()
}

/// Weights of a single dense layer from 784 inputs to 10 classes.
pub fn model_weights() -> Type {
    StructType::named([
        ("kernel", Type::tensor(DType::Float32, [Some(784), Some(10)])),
        ("bias", Type::tensor(DType::Float32, [Some(10)])),
    ])
    .unwrap()
    .into()
}

/// The server state: model weights and an optimizer step counter.
pub fn server_state() -> Type {
    let state = StructType::named([
        ("model", model_weights()),
        ("optimizer_step", Type::scalar(DType::Int64)),
    ])
    .unwrap();

    at_server(state)
}

/// One sequence of batches per client.
pub fn client_data() -> Type {
    at_clients(Type::sequence(batch()))
}

/// Training metrics reported by the server each round.
pub fn train_metrics() -> Type {
    let metrics = StructType::named([
        ("loss", Type::scalar(DType::Float32)),
        ("accuracy", Type::scalar(DType::Float32)),
    ])
    .unwrap();

    at_server(metrics)
}

/// Diagnostics about the clients that took part in a round.
pub fn participation() -> Type {
    at_server(StructType::named([("num_clients", Type::scalar(DType::Int32))]).unwrap())
}

/// The `<state,result,measurements>` envelope returned by a measured round.
pub fn envelope(state: Type, result: Type, measurements: Type) -> Type {
    StructType::named(ENVELOPE_FIELDS.into_iter().zip([state, result, measurements]))
        .unwrap()
        .into()
}

pub fn initialize() -> Computation {
    Computation::new("initialize", Type::function(None, server_state()))
}

/// A round that returns `<state, metrics>`.
pub fn next_with_metrics() -> Computation {
    let parameter = StructType::unnamed([server_state(), client_data()]);
    let result = StructType::unnamed([server_state(), train_metrics()]);

    Computation::new("next", Type::function(Some(parameter.into()), result))
}

/// A round that returns the measured envelope.
pub fn next_measured() -> Computation {
    let parameter = StructType::unnamed([server_state(), client_data()]);
    let result = envelope(server_state(), train_metrics(), participation());

    Computation::new("next", Type::function(Some(parameter.into()), result))
}
