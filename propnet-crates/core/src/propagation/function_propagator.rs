use std::fmt::Debug;

use log::trace;

use super::PropagationContext;
use super::PropagationStatus;
use super::Propagator;
use crate::basic_types::NetworkError;
use crate::basic_types::OperationError;
use crate::basic_types::Value;
use crate::engine::CellId;
use crate::engine::DebugDyn;

/// A propagator which applies a function to the content of its inputs and adds the result to
/// its output.
///
/// The function is only applied once every input has content. It returns `Ok(None)` when it
/// cannot derive anything from the given contents.
pub struct FunctionPropagator<F> {
    name: String,
    inputs: Vec<CellId>,
    function: F,
    output: CellId,
}

impl<F> FunctionPropagator<F>
where
    F: Fn(&[Value]) -> Result<Option<Value>, OperationError> + 'static,
{
    pub fn new(inputs: impl Into<Vec<CellId>>, function: F, output: CellId) -> Self {
        FunctionPropagator {
            name: "function".to_owned(),
            inputs: inputs.into(),
            function,
            output,
        }
    }

    /// Gives the propagator a name, which is used in logging and in error messages.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn output(&self) -> CellId {
        self.output
    }
}

impl<F> Propagator for FunctionPropagator<F>
where
    F: Fn(&[Value]) -> Result<Option<Value>, OperationError> + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn inputs(&self) -> &[CellId] {
        &self.inputs
    }

    fn propagate(&self, mut context: PropagationContext) -> PropagationStatus {
        let Some(arguments) = context.contents(&self.inputs) else {
            return Ok(());
        };

        let result =
            (self.function)(&arguments).map_err(|source| NetworkError::PropagatorFailed {
                propagator: self.name.clone(),
                source,
            })?;
        trace!("{} derived {result:?}", self.name);

        context.add_content(self.output, result)
    }
}

impl<F> Debug for FunctionPropagator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionPropagator")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("function", &DebugDyn::from("Fn"))
            .field("output", &self.output)
            .finish()
    }
}
