mod failures;
mod site_rendering;
