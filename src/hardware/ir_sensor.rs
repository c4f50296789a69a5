use super::traits::ObjectSensor;
#[cfg(feature = "async")]
use crate::app::SharedState;
#[cfg(feature = "async")]
use core::convert::Infallible;
#[cfg(feature = "async")]
use embedded_hal::digital::ErrorType;
use embedded_hal::digital::InputPin;
#[cfg(feature = "async")]
use embedded_hal_async::digital::Wait;

/// Infrared obstacle sensor. The module pulls its output LOW while
/// something reflects the beam.
pub struct IrSensor<P> {
    pin: P,
}

impl<P> IrSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ObjectSensor for IrSensor<P> {
    type Error = P::Error;

    fn object_present(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}

#[cfg(feature = "async")]
impl<P: InputPin + Wait> IrSensor<P> {
    /// Waits for a rising or falling edge, then publishes the new level.
    pub async fn next_edge(
        &mut self,
        shared: &SharedState,
    ) -> Result<bool, <P as ErrorType>::Error> {
        self.pin.wait_for_any_edge().await?;
        shared.on_sensor_edge(self)
    }

    /// Publishes every edge until the pin reports an error.
    pub async fn watch(
        &mut self,
        shared: &SharedState,
    ) -> Result<Infallible, <P as ErrorType>::Error> {
        loop {
            self.next_edge(shared).await?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Level flips on every awaited edge.
    struct TogglingPin {
        low: bool,
        edges: u32,
    }

    impl ErrorType for TogglingPin {
        type Error = Infallible;
    }

    impl InputPin for TogglingPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.low)
        }
    }

    #[cfg(feature = "async")]
    impl Wait for TogglingPin {
        async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
            self.low = false;
            Ok(())
        }

        async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
            self.low = true;
            Ok(())
        }

        async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
            self.wait_for_high().await
        }

        async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
            self.wait_for_low().await
        }

        async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
            self.low = !self.low;
            self.edges += 1;
            Ok(())
        }
    }

    #[test]
    fn low_level_means_object_present() {
        let mut sensor = IrSensor::new(TogglingPin { low: true, edges: 0 });
        assert_eq!(sensor.object_present(), Ok(true));

        let mut sensor = IrSensor::new(TogglingPin { low: false, edges: 0 });
        assert_eq!(sensor.object_present(), Ok(false));
    }

    #[cfg(feature = "async")]
    #[test]
    fn each_edge_publishes_the_sampled_level() {
        use embassy_futures::block_on;

        let shared = SharedState::new();
        let mut sensor = IrSensor::new(TogglingPin { low: false, edges: 0 });

        assert_eq!(block_on(sensor.next_edge(&shared)), Ok(true));
        assert!(shared.detection.is_set());

        assert_eq!(block_on(sensor.next_edge(&shared)), Ok(false));
        assert!(!shared.detection.is_set());

        assert_eq!(sensor.release().edges, 2);
    }
}
