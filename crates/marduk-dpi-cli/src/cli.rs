use anyhow::{ensure, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use marduk_dpi::{
    device_to_logical, logical_to_device, transform_to_device_x, transform_to_device_y,
    DpiConfig, DpiScale, Point, Rect, Size, Thickness,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "marduk-dpi")]
#[command(about = "Convert geometry between logical units and device pixels", long_about = None)]
pub struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Logical units -> device pixels
    ToDevice {
        #[command(subcommand)]
        value: DeviceValue,
    },
    /// Device pixels -> logical units
    ToLogical {
        #[command(subcommand)]
        value: LogicalValue,
    },
    /// One-axis conversion: VALUE * DPI / 96
    #[command(allow_negative_numbers = true)]
    Scalar {
        value: f64,
        /// Device pixels per 96 logical units
        #[arg(long)]
        dpi: f64,
        #[arg(long, value_enum, default_value_t = Axis::X)]
        axis: Axis,
    },
    /// Print the quantities derived from a DPI scale
    Info {
        #[command(flatten)]
        scale: ScaleArgs,
    },
}

/// Values accepted by `to-device`.
#[derive(Subcommand, Debug, Clone)]
pub enum DeviceValue {
    #[command(allow_negative_numbers = true)]
    Point {
        x: f64,
        y: f64,
        #[command(flatten)]
        scale: ScaleArgs,
    },
    #[command(allow_negative_numbers = true)]
    Rect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        #[command(flatten)]
        scale: ScaleArgs,
    },
    #[command(allow_negative_numbers = true)]
    Size {
        width: f64,
        height: f64,
        #[command(flatten)]
        scale: ScaleArgs,
    },
    #[command(allow_negative_numbers = true)]
    Thickness {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        #[command(flatten)]
        scale: ScaleArgs,
    },
}

/// Values accepted by `to-logical`. Thickness only converts one way.
#[derive(Subcommand, Debug, Clone)]
pub enum LogicalValue {
    #[command(allow_negative_numbers = true)]
    Point {
        x: f64,
        y: f64,
        #[command(flatten)]
        scale: ScaleArgs,
    },
    #[command(allow_negative_numbers = true)]
    Rect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        #[command(flatten)]
        scale: ScaleArgs,
    },
    #[command(allow_negative_numbers = true)]
    Size {
        width: f64,
        height: f64,
        #[command(flatten)]
        scale: ScaleArgs,
    },
}

#[derive(ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Args, Debug, Clone)]
pub struct ScaleArgs {
    /// Per-axis DPI scale (1.0 = 96 DPI)
    #[arg(
        long,
        num_args = 2,
        value_names = ["SX", "SY"],
        allow_negative_numbers = true,
        required = true
    )]
    pub scale: Vec<f64>,
}

impl ScaleArgs {
    fn pair(&self) -> Result<(f64, f64)> {
        ensure!(
            self.scale.len() == 2,
            "--scale takes exactly two values, got {}",
            self.scale.len()
        );
        Ok((self.scale[0], self.scale[1]))
    }
}

/// Runs one command and returns its single-line output.
pub fn run(command: &Command, config: DpiConfig) -> Result<String> {
    let out = match command {
        Command::ToDevice { value } => to_device(value)?,
        Command::ToLogical { value } => to_logical(value)?,
        Command::Scalar { value, dpi, axis } => {
            let v = match axis {
                Axis::X => transform_to_device_x(*value, *dpi),
                Axis::Y => transform_to_device_y(*value, *dpi),
            };
            v.to_string()
        }
        Command::Info { scale } => {
            let (sx, sy) = scale.pair()?;
            let dpi = DpiScale::new(sx, sy);
            if !dpi.is_valid() {
                log::warn!("scale {dpi} is not finite and positive; conversions will misbehave");
            }
            format!(
                "scale={dpi} pixels_per_dip={} ppi_x={} ppi_y={} mode={}",
                dpi.pixels_per_dip(),
                dpi.pixels_per_inch_x(),
                dpi.pixels_per_inch_y(),
                config.mode,
            )
        }
    };
    Ok(out)
}

fn to_device(value: &DeviceValue) -> Result<String> {
    let out = match value {
        DeviceValue::Point { x, y, scale } => {
            let (sx, sy) = scale.pair()?;
            fmt_point(logical_to_device(Point::new(*x, *y), sx, sy))
        }
        DeviceValue::Rect { left, top, right, bottom, scale } => {
            let (sx, sy) = scale.pair()?;
            fmt_rect(logical_to_device(Rect::new(*left, *top, *right, *bottom), sx, sy))
        }
        DeviceValue::Size { width, height, scale } => {
            let (sx, sy) = scale.pair()?;
            fmt_size(logical_to_device(Size::new(*width, *height), sx, sy))
        }
        DeviceValue::Thickness { left, top, right, bottom, scale } => {
            let (sx, sy) = scale.pair()?;
            let t = logical_to_device(Thickness::new(*left, *top, *right, *bottom), sx, sy);
            format!("{} {} {} {}", t.left, t.top, t.right, t.bottom)
        }
    };
    Ok(out)
}

fn to_logical(value: &LogicalValue) -> Result<String> {
    let out = match value {
        LogicalValue::Point { x, y, scale } => {
            let (sx, sy) = scale.pair()?;
            fmt_point(device_to_logical(Point::new(*x, *y), sx, sy))
        }
        LogicalValue::Rect { left, top, right, bottom, scale } => {
            let (sx, sy) = scale.pair()?;
            fmt_rect(device_to_logical(Rect::new(*left, *top, *right, *bottom), sx, sy))
        }
        LogicalValue::Size { width, height, scale } => {
            let (sx, sy) = scale.pair()?;
            fmt_size(device_to_logical(Size::new(*width, *height), sx, sy))
        }
    };
    Ok(out)
}

fn fmt_point(p: Point) -> String {
    format!("{} {}", p.x, p.y)
}

fn fmt_rect(r: Rect) -> String {
    format!("{} {} {} {}", r.left, r.top, r.right, r.bottom)
}

fn fmt_size(s: Size) -> String {
    format!("{} {}", s.width, s.height)
}
