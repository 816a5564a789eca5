//
//  employes-client
//  resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Employes API resources.
//!
//! Each resource is a thin wrapper around an [`Entity`](crate::Entity) that
//! fixes its endpoint segment and fillable attributes and declares its
//! capabilities.
//!
//! | Resource | Endpoint | Capabilities |
//! |----------|----------|--------------|
//! | [`Employee`] | `<administration>/employees/` | list, get, save, delete |
//! | [`Leave`] | `<administration>/leaves/` | list, get |

pub mod employee;
pub mod leave;

pub use employee::Employee;
pub use leave::Leave;
