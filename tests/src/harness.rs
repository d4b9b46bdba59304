mod termination;
