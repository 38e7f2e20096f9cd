pub trait PendulumProperties {
    fn gravity(&self) -> f64;
    fn length1(&self) -> f64;
    fn length2(&self) -> f64;
    fn mass1(&self) -> f64;
    fn mass2(&self) -> f64;

    fn total_mass(&self) -> f64 {
        self.mass1() + self.mass2()
    }
}
