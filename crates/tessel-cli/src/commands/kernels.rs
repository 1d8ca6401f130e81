//! Bundled demo kernels.
//!
//! Each kernel is ordinary host code written against the tracing API.
//! The CLI traces them on demand; nothing here runs on a GPU.

use tessel_compiler::value::{Buffer1D, Buffer2D, Float, Float4, UInt4};
use tessel_compiler::{Input, Program, Session, Source, TraceError, Value};

use super::CliError;

/// Host-side parameters shared by all kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelParams {
    /// Loop bound for kernels that reduce over a range.
    pub width: i32,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self { width: 8 }
    }
}

type Build = fn(&mut Session, &KernelParams) -> Result<(), TraceError>;

pub struct Kernel {
    pub name: &'static str,
    pub description: &'static str,
    build: Build,
}

impl Kernel {
    pub fn trace(&self, params: &KernelParams) -> Result<Source, TraceError> {
        tracing::debug!(kernel = self.name, width = params.width, "tracing");
        tessel_compiler::trace(|s| (self.build)(s, params))
    }

    pub fn compile(&self, params: &KernelParams) -> tessel_compiler::Result<Program> {
        tracing::debug!(kernel = self.name, width = params.width, "compiling");
        tessel_compiler::compile(|s| (self.build)(s, params))
    }
}

pub const KERNELS: &[Kernel] = &[
    Kernel {
        name: "add-constant",
        description: "out = a + 2.0 over a float input",
        build: add_constant,
    },
    Kernel {
        name: "sum-range",
        description: "sum the first --width elements of a 1-D buffer",
        build: sum_range,
    },
    Kernel {
        name: "square-error",
        description: "squared difference of two 2-D float buffers",
        build: square_error,
    },
    Kernel {
        name: "cross-entropy",
        description: "binary cross-entropy of two 2-D float buffers",
        build: cross_entropy,
    },
    Kernel {
        name: "sigmoid",
        description: "logistic activation over a 2-D float buffer",
        build: sigmoid,
    },
    Kernel {
        name: "xorshift",
        description: "xorshift128 step over a uint4 seed buffer",
        build: xorshift,
    },
    Kernel {
        name: "uv",
        description: "normalized fragment coordinate as a color",
        build: uv,
    },
];

pub fn find(name: &str) -> Result<&'static Kernel, CliError> {
    KERNELS
        .iter()
        .find(|kernel| kernel.name == name)
        .ok_or_else(|| CliError::UnknownKernel(name.to_string()))
}

fn add_constant(s: &mut Session, _: &KernelParams) -> Result<(), TraceError> {
    let a = s.const_data(|s| s.input::<Float>("a"))?;
    let mut out = s.out_data(|s| s.output::<Float>("out"))?;
    s.main(|s| {
        let sum = s.add(a, 2.0f32)?;
        s.assign(&mut out, sum)
    })
}

fn sum_range(s: &mut Session, params: &KernelParams) -> Result<(), TraceError> {
    let values = s.const_data(|s| s.input::<Buffer1D<Float>>("values"))?;
    let mut total = s.out_data(|s| s.output::<Float>("total"))?;
    let width = params.width;
    s.main(|s| {
        let mut acc = s.var(0.0f32)?;
        s.for_range("i", 0, width, |s, i| {
            let value = s.sample1d(&values, i)?;
            s.add_assign(&mut acc, value)
        })?;
        s.assign(&mut total, acc)
    })
}

type FloatGrid = Input<Buffer2D<Float>>;

fn error_inputs(s: &mut Session) -> Result<(FloatGrid, FloatGrid), TraceError> {
    s.const_data(|s| {
        let actual = s.input::<Buffer2D<Float>>("actual")?;
        let expected = s.input::<Buffer2D<Float>>("expected")?;
        Ok((actual, expected))
    })
}

/// Both grids sampled at the current element.
fn sample_pair(
    s: &mut Session,
    actual: &FloatGrid,
    expected: &FloatGrid,
) -> Result<(Value<Float>, Value<Float>), TraceError> {
    let index = s.index();
    let mut index = s.var(index)?;
    let x = s.x(&mut index)?;
    let y = s.y(&mut index)?;
    let a = s.sample2d(actual, &x, &y)?;
    let e = s.sample2d(expected, &x, &y)?;
    Ok((a, e))
}

fn square_error(s: &mut Session, _: &KernelParams) -> Result<(), TraceError> {
    let (actual, expected) = error_inputs(s)?;
    let mut error = s.out_data(|s| s.output::<Float>("error"))?;
    s.main(|s| {
        let (a, e) = sample_pair(s, &actual, &expected)?;
        let diff = s.sub(a, e)?;
        let diff = s.var(diff)?;
        let square = s.mul(&diff, &diff)?;
        s.assign(&mut error, square)
    })
}

fn cross_entropy(s: &mut Session, _: &KernelParams) -> Result<(), TraceError> {
    let (actual, expected) = error_inputs(s)?;
    let mut error = s.out_data(|s| s.output::<Float>("error"))?;
    s.main(|s| {
        let (a, e) = sample_pair(s, &actual, &expected)?;
        // keep both logarithms finite
        let p = s.clamp(a, 0.000001f32, 0.999999f32)?;
        let p = s.var(p)?;
        let e = s.var(e)?;

        let log_p = s.log(&p)?;
        let hit = s.mul(&e, log_p)?;
        let q = s.sub(1.0f32, &p)?;
        let log_q = s.log(q)?;
        let miss_weight = s.sub(1.0f32, &e)?;
        let miss = s.mul(miss_weight, log_q)?;

        let sum = s.add(hit, miss)?;
        let loss = s.neg(sum)?;
        s.assign(&mut error, loss)
    })
}

fn sigmoid(s: &mut Session, _: &KernelParams) -> Result<(), TraceError> {
    let x = s.const_data(|s| s.input::<Buffer2D<Float>>("x"))?;
    let mut y = s.out_data(|s| s.output::<Float>("y"))?;
    s.main(|s| {
        let index = s.index();
        let z = s.sample2d_at(&x, index)?;
        let neg = s.neg(z)?;
        let e = s.exp(neg)?;
        let denom = s.add(1.0f32, e)?;
        let value = s.div(1.0f32, denom)?;
        s.assign(&mut y, value)
    })
}

fn xorshift(s: &mut Session, _: &KernelParams) -> Result<(), TraceError> {
    let state = s.const_data(|s| s.input::<Buffer2D<UInt4>>("state"))?;
    let mut next = s.out_data(|s| s.output::<UInt4>("next"))?;
    s.main(|s| {
        let index = s.index();
        let cell = s.sample2d_at(&state, index)?;
        let mut seed = s.var(cell)?;
        let mut x = s.x(&mut seed)?;
        let mut y = s.y(&mut seed)?;
        let mut z = s.z(&mut seed)?;
        let mut w = s.w(&mut seed)?;

        let shifted = s.shl(&x, 11u32)?;
        let t = s.bit_xor(&x, shifted)?;
        let t = s.var(t)?;

        s.assign(&mut x, &y)?;
        s.assign(&mut y, &z)?;
        s.assign(&mut z, &w)?;

        let w_shift = s.shr(&w, 19u32)?;
        let w_mix = s.bit_xor(&w, w_shift)?;
        let t_shift = s.shr(&t, 8u32)?;
        let t_mix = s.bit_xor(&t, t_shift)?;
        let mixed = s.bit_xor(w_mix, t_mix)?;
        s.assign(&mut w, mixed)?;

        s.assign(&mut next, &seed)
    })
}

fn uv(s: &mut Session, _: &KernelParams) -> Result<(), TraceError> {
    let mut color = s.out_data(|s| s.output::<Float4>("color"))?;
    s.main(|s| {
        let uv = s.normalized_index();
        let mut uv = s.var(uv)?;
        let u = s.x(&mut uv)?;
        let v = s.y(&mut uv)?;
        let rgba = s.construct4::<Float4, _, _, _, _>(u, v, 0.0f32, 1.0f32)?;
        s.assign(&mut color, rgba)
    })
}
