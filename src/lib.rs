#![doc = r#"
devtype: tooling for maintaining a device-type library.

The crate bundles two independent batch transformations:

- **Image normalizer**: crops elevation PNGs to their opaque region, then
  pads (or crops) them on the right to a fixed width:height ratio and
  flattens them onto a white background.
- **Device-record generator**: reads a model CSV (port counts, console and
  power attributes) and writes one device-type YAML document per row,
  flagging front/rear elevation images that exist alongside.

Both are exposed as a typed library API and through the `devtype` CLI.

Normalize a directory of PNGs
-----------------------------
```rust,no_run
use std::path::Path;
use devtype::{normalize_directory, NormalizeParams, OutputNaming};

fn main() -> devtype::Result<()> {
    let params = NormalizeParams {
        naming: OutputNaming::Prefixed,
        ..NormalizeParams::default()
    };
    let report = normalize_directory(Path::new("front-rear"), &params)?;
    println!("processed={} skipped={}", report.processed, report.skipped);
    Ok(())
}
```

Generate device-type documents
------------------------------
```rust,no_run
use std::path::Path;
use devtype::{generate_from_csv, GenerateParams};

fn main() -> devtype::Result<()> {
    let report = generate_from_csv(Path::new("models.csv"), &GenerateParams::default())?;
    println!("generated {} documents", report.processed);
    Ok(())
}
```

Building a record in memory
---------------------------
```rust
use devtype::{DeviceRowReader, GenerateParams, build_device_record};

let csv = "Model,Stacking,GigabitEthernet Copper,GigabitEthernet SFP,GigabitEthernet Combo,\
TwoGigabitEthernet,TenGigabitEthernet Copper,TenGigabitEthernet SFP+,TenGigabitEthernet Combo,\
OOB,con0,con1,con2,psu0,Draw,Weight (pounds)\n\
C1300-8T-E-2G,false,8,0,0,0,0,0,0,,rj-45,,,iec-60320-c14,14.2,2.8\n";

let row = DeviceRowReader::new(csv.as_bytes())?.next().unwrap()?;
let record = build_device_record(&row, &GenerateParams::default());
assert_eq!(record.model, "Catalyst 1300-8T-E-2G");
assert_eq!(record.interfaces.len(), 9);
# Ok::<(), devtype::Error>(())
```

Error handling
--------------
All public functions return `devtype::Result<T>`. Batches fail fast by default:
the first unreadable image or malformed row aborts the run, leaving files
written so far in place. Set `continue_on_error` on the params to log and
count failures instead.

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: image primitives, device derivation and parameter presets.
- [`io`]: PNG, CSV and YAML readers/writers and the elevation-image lookup.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::device::console::ConsolePort;
pub use crate::core::device::interfaces::Interface;
pub use crate::core::device::record::{DeviceRecord, PowerPort};
pub use crate::core::device::row::{DeviceRow, PortCounts};
pub use crate::core::params::{GenerateParams, NormalizeParams};
pub use error::{Error, Result};
pub use types::{InterfaceType, OutputNaming, PoeMode, PoeType, WeightUnit};

// Building blocks
pub use crate::core::device::console::derive_console_ports;
pub use crate::core::device::interfaces::derive_interfaces;
pub use crate::core::device::record::build_device_record;
pub use crate::core::device::slug::slugify;
pub use crate::core::processing::aspect::enforce_aspect_ratio;
pub use crate::core::processing::crop::crop_to_opaque;
pub use io::csv_rows::DeviceRowReader;
pub use io::writers::yaml::to_yaml_document;

// High-level API re-exports
pub use api::{
    BatchReport, generate_from_csv, generate_from_reader, generate_record_file,
    normalize_directory, normalize_image_to_path,
};
