// ─── Pack Writer Core ───
// Shared write path for every resource pack asset.
//
// Architecture:
//   core/
//     writer/    : StructuredWriter: scope-checked canonical JSON
//     container/ : Container + Entry state machine; memory, directory, zip targets
//     rules      : Encoding Rule Table (declared field defaults)
//     paths      : (namespace, value, kind) → entry path
//     key        : namespaced identifiers
//     model/     : data-only asset types
//     encode/    : one Document impl per asset kind
//     pipeline   : ResourcePackWriter orchestrator
//     settings   : persisted writer options

pub mod container;
pub mod encode;
pub mod error;
pub mod key;
pub mod model;
pub mod paths;
pub mod pipeline;
pub mod rules;
pub mod settings;
pub mod writer;
