// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Regenerates `ProcedureSetupStep.tsx` from the activity table in `ChooseProceduresStep.tsx`.
pub mod colour;
pub mod config;
pub mod extensions;
pub mod extract;
pub mod file_io;
pub mod pipeline;
pub mod template;
pub mod types;
