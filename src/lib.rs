/*!
```console
           _                     _
  ___   __| | ___  _ __ ___   ___| |_ ___ _ __
 / _ \ / _` |/ _ \| '_ ` _ \ / _ \ __/ _ \ '__|
| (_) | (_| | (_) | | | | | |  __/ ||  __/ |
 \___/ \__,_|\___/|_| |_| |_|\___|\__\___|_|
```

Mixed-radix enumeration over multiple dimensions.

[`IndexOdometer`] walks index tuples for a list of sizes, [`ElementOdometer`]
walks element tuples drawn from a list of collections. Both count with
dimension 0 as the least-significant digit.
*/

mod core;
pub use crate::core::radix;
pub use crate::core::{
    tabulate, DimensionError, ElementOdometer, IndexOdometer, IterationError, PeekingCursor,
    RolloverCursor,
};
