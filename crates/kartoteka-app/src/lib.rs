// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod directory;
pub mod forms;
pub mod ids;
pub mod model;
pub mod seed;
pub mod text;

pub use directory::*;
pub use forms::*;
pub use ids::*;
pub use model::*;
pub use seed::*;
pub use text::*;
