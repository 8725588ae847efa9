mod advisor_flow;
mod dashboard_flow;
