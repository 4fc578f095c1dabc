pub mod node;
pub mod error;
pub mod engine;
pub mod reader;
pub mod writer;
pub mod virtual_dataset;
pub mod session;
pub mod layout;
pub mod debounce;
pub mod config;
pub mod logging;
pub mod theme;

// Export data model
pub use node::{Node, NodeId, Dataset};
pub use error::FilterError;

// Export filter engine
pub use engine::{
    NamePredicate, FilteredSet, Renumbered,
    filter_by_predicate, ancestor_closure, sort_by_original_id,
    renumber, renumber_detailed, refresh
};

// Export dataset I/O
pub use reader::{DatasetReader, JsonDatasetReader, parse_dataset, parse_dataset_str};
pub use writer::DatasetWriter;
pub use virtual_dataset::VirtualDatasetReader;

// Export session and rendering contract
pub use session::{DatasetContext, DatasetCache, FilterSession, RenderFrame, RenderSink};
pub use layout::{LayoutPoint, compute_layout};
pub use debounce::{Debouncer, DebounceHandle};

// Export ambient support
pub use config::ViewerConfig;
pub use logging::init_tracing;
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
